use email_body_parser::*;

fn parser() -> EmailBodyParser {
    EmailBodyParser::default()
}

// --- parse() ---

#[test]
fn test_parse_empty_input() {
    let email = parser().parse("");
    assert!(email.is_empty());
    assert_eq!(email.visible_text(), "");
    assert_eq!(email.quoted_text(), "");

    assert!(parser().parse(None::<&str>).is_empty());
}

#[test]
fn test_parse_simple_content() {
    let input = "Hello, this is a test email.";
    let email = parser().parse(input);

    assert_eq!(email.len(), 1);
    assert_eq!(email.visible_text(), input);
    assert_eq!(email.quoted_text(), "");
}

#[test]
fn test_parse_pattern_free_text_is_one_trimmed_body_fragment() {
    let email = parser().parse("\n\nFirst line\n\nSecond line\n\n");

    assert_eq!(email.len(), 1);
    assert_eq!(email.fragments[0].category, LineCategory::Body);
    assert_eq!(email.fragments[0].content, "First line\n\nSecond line");
}

#[test]
fn test_parse_attribution_line() {
    let input = "Thanks for the info!\n\nOn Mon, Mar 17, 2025 at 1:29 PM John wrote:\nPrevious message";
    let email = parser().parse(input);

    let categories: Vec<LineCategory> = email.fragments().iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        [LineCategory::Body, LineCategory::Quote, LineCategory::Body]
    );
    assert_eq!(email.fragments[0].content, "Thanks for the info!");
    assert!(email.quoted_text().starts_with("On Mon"));
}

#[test]
fn test_parse_quote_markers() {
    let input = "My response here.\n\n> Quoted line 1\n> Quoted line 2";
    let email = parser().parse(input);

    assert_eq!(email.visible_text(), "My response here.");
    assert_eq!(email.quoted_text(), "> Quoted line 1\n> Quoted line 2");
}

#[test]
fn test_parse_auto_signature() {
    let email = parser().parse("Quick update.\n\nSent from my iPhone");

    let signature = email
        .fragments()
        .iter()
        .find(|f| f.is_signature())
        .unwrap();
    assert_eq!(signature.content, "Sent from my iPhone");
    assert_eq!(email.visible_text(), "Quick update.");
}

#[test]
fn test_parse_mailing_list_footer() {
    let email = parser().parse("Content here\n--\nTo unsubscribe, click here");

    let categories: Vec<LineCategory> = email.fragments().iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        [
            LineCategory::Body,
            LineCategory::AutoSignature,
            LineCategory::MailingListFooter
        ]
    );
    assert_eq!(email.visible_text(), "Content here");
}

#[test]
fn test_parse_fragments_cover_input_in_order() {
    let input = "Hi\n> a\n> b\nmiddle\nSent from my phone\n> c";
    let email = parser().parse(input);

    let rebuilt: Vec<&str> = email.fragments().iter().map(|f| f.content.as_str()).collect();
    assert_eq!(rebuilt.join("\n"), input);
    assert_eq!(email.len(), 5);
}

#[test]
fn test_parse_quoted_text_excludes_other_categories() {
    let input = "Mine\n> old one\nSent from my iPhone\n> old two\nAlso mine";
    let quoted = parser().extract_quoted_text(input);

    assert_eq!(quoted, "> old one\n> old two");
}

#[test]
fn test_into_fragments_keeps_order() {
    let fragments = parser().parse("Hi\n> old\nBye").into_fragments();

    let categories: Vec<LineCategory> = fragments.iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        [LineCategory::Body, LineCategory::Quote, LineCategory::Body]
    );
    assert_eq!(fragments[2].content, "Bye");
}

// --- Shorthands ---

#[test]
fn test_extract_visible_text() {
    assert_eq!(parser().extract_visible_text("Hello!\n\n> Old message"), "Hello!");
}

#[test]
fn test_extract_quoted_text() {
    let quoted = parser().extract_quoted_text("Hello!\n\n> Old message\n> More old message");
    assert_eq!(quoted, "> Old message\n> More old message");
}

#[test]
fn test_visible_text_strips_trailing_tildes() {
    assert_eq!(parser().extract_visible_text("Hello~~~\n> old"), "Hello");
}

// --- Fragment flags ---

#[test]
fn test_body_fragment_flags() {
    let email = parser().parse("Simple content");
    let fragment = &email.fragments[0];

    assert!(!fragment.is_hidden());
    assert!(!fragment.is_quoted());
    assert!(!fragment.is_signature());
    assert_eq!(fragment.to_string(), "Simple content");
}

#[test]
fn test_quoted_fragment_flags() {
    let email = parser().parse("Response\n\n> Quoted");
    let fragment = email.fragments().iter().find(|f| f.is_quoted()).unwrap();

    assert!(fragment.is_hidden());
    assert!(!fragment.is_signature());
}

#[test]
fn test_signature_fragment_flags() {
    let email = parser().parse("Message\n\nSent from my iPhone");
    let fragment = email.fragments().iter().find(|f| f.is_signature()).unwrap();

    assert!(fragment.is_hidden());
    assert!(!fragment.is_quoted());
}

// --- Options ---

#[test]
fn test_footer_toggle() {
    let input = "Content here\n\nYou received this message because you are subscribed";

    let with_footers = EmailBodyParser::new(ParserOptions::default());
    let without_footers = EmailBodyParser::new(ParserOptions {
        remove_mailing_list_footers: false,
        ..ParserOptions::default()
    });

    assert_eq!(with_footers.extract_visible_text(input), "Content here");
    assert_eq!(without_footers.extract_visible_text(input), input);
    assert_eq!(without_footers.parse(input).len(), 1);
}

#[test]
fn test_keep_signatures_does_not_suppress_detection() {
    let parser = EmailBodyParser::new(ParserOptions {
        keep_signatures: false,
        ..ParserOptions::default()
    });
    let email = parser.parse("Hi\nSent from my iPhone");

    assert!(email.fragments().iter().any(Fragment::is_signature));
    assert!(!parser.options().keep_signatures);
}

#[test]
fn test_custom_rules() {
    let rule = PatternRule::new(r"(?i)^Cheers from the bot$", "Bot tagline", "Cheers from the bot")
        .unwrap();
    let rules = RuleSets {
        auto_signature: AUTO_SIGNATURE_PATTERNS.clone().with_rule(rule),
        ..RuleSets::default()
    };
    let parser = EmailBodyParser::with_rules(ParserOptions::default(), rules);

    assert_eq!(parser.extract_visible_text("Done.\ncheers from the bot"), "Done.");
}

// --- Edge cases ---

#[test]
fn test_parse_crlf_line_endings() {
    let email = parser().parse("Line 1\r\nLine 2\r\n\r\n> Quoted");

    assert_eq!(email.visible_text(), "Line 1\nLine 2");
    assert_eq!(email.quoted_text(), "> Quoted");
}

#[test]
fn test_parse_multiple_quote_types() {
    let input = "My response\n\nOn Mon wrote:\n> Something quoted\n\n-----Original Message-----\nAnother thing";
    let email = parser().parse(input);

    assert!(email.visible_text().starts_with("My response"));
    assert!(email.quoted_text().contains("-----Original Message-----"));
}

#[test]
fn test_parse_cleans_image_placeholders() {
    let input = "Check this [image: test.png] out!\n\n[Image]\n\nCool right?";
    let visible = parser().extract_visible_text(input);

    assert!(!visible.contains("[image:"));
    assert!(!visible.contains("[Image]"));
    assert_eq!(visible, "Check this  out!\n\n\n\nCool right?");
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = &parser();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || parser.extract_visible_text(format!("Reply {i}\n> old").as_str()))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("Reply {i}"));
        }
    });
}
