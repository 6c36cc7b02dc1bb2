//! Tests for message wire serialization.

use super::*;
use serde_json::Value;
use std::time::Duration;

fn to_value(msg: &Message) -> Value {
    serde_json::from_slice(&msg.to_json().unwrap()).unwrap()
}

mod wire_shape {
    use super::*;

    #[test]
    fn text_only_message_has_no_attachments_key() {
        let json = to_value(&Message::new("Hello"));

        assert_eq!(json, serde_json::json!({ "text": "Hello" }));
    }

    #[test]
    fn nested_attachment_and_field_serialize() {
        let msg = Message::new("x").with_attachment(
            Attachment::new("f").with_field(Field::new("t", "v").short()),
        );

        let json = to_value(&msg);

        assert_eq!(json["text"], "x");
        let attachments = json["attachments"].as_array().unwrap();
        assert_eq!(attachments.len(), 1);
        let fields = attachments[0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0]["title"], "t");
        assert_eq!(fields[0]["value"], "v");
        assert_eq!(fields[0]["short"], true);
    }

    #[test]
    fn unset_optional_attributes_are_omitted() {
        let msg = Message::new("x").with_attachment(Attachment::new("f"));

        let json = to_value(&msg);
        let attachment = json["attachments"][0].as_object().unwrap();

        assert_eq!(attachment.len(), 1);
        assert_eq!(attachment["fallback"], "f");
        for key in [
            "pretext",
            "color",
            "title",
            "title_link",
            "text",
            "ts",
            "fields",
        ] {
            assert!(!attachment.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn empty_strings_and_zero_timestamp_are_omitted() {
        let msg = Message::new("x").with_attachment(
            Attachment::new("f")
                .with_pretext("")
                .with_color("")
                .with_title("")
                .with_title_link("")
                .with_text("")
                .with_timestamp(UNIX_EPOCH - Duration::from_secs(5)),
        );

        let json = to_value(&msg);
        let attachment = json["attachments"][0].as_object().unwrap();

        assert_eq!(attachment.len(), 1, "unexpected keys in {attachment:?}");
        assert_eq!(attachment["fallback"], "f");
    }

    #[test]
    fn empty_fallback_is_still_emitted() {
        let msg = Message::new("x").with_attachment(Attachment::default());

        let json = to_value(&msg);

        assert_eq!(json["attachments"][0]["fallback"], "");
    }

    #[test]
    fn long_field_emits_short_false() {
        let msg = Message::new("x")
            .with_attachment(Attachment::new("f").with_field(Field::new("t", "v")));

        let json = to_value(&msg);

        assert_eq!(json["attachments"][0]["fields"][0]["short"], false);
    }

    #[test]
    fn all_attachment_attributes_use_slack_names() {
        let msg = Message::new("x").with_attachment(
            Attachment::new("fb")
                .with_pretext("pre")
                .with_color("#36a64f")
                .with_title("Build")
                .with_title_link("https://ci.example.com/1")
                .with_text("body")
                .with_ts(1_700_000_000),
        );

        let json = to_value(&msg);
        let attachment = &json["attachments"][0];

        assert_eq!(attachment["pretext"], "pre");
        assert_eq!(attachment["color"], "#36a64f");
        assert_eq!(attachment["title"], "Build");
        assert_eq!(attachment["title_link"], "https://ci.example.com/1");
        assert_eq!(attachment["text"], "body");
        assert_eq!(attachment["ts"], 1_700_000_000);
        assert!(attachment.get("timestamp").is_none());
    }

    #[test]
    fn attachments_keep_insertion_order() {
        let msg = Message::new("x")
            .with_attachment(Attachment::new("first"))
            .with_attachment(Attachment::new("second"));

        let json = to_value(&msg);

        assert_eq!(json["attachments"][0]["fallback"], "first");
        assert_eq!(json["attachments"][1]["fallback"], "second");
    }
}

mod timestamps {
    use super::*;

    #[test]
    fn with_timestamp_converts_to_epoch_seconds() {
        let time = UNIX_EPOCH + Duration::from_secs(1_000_000);
        let attachment = Attachment::new("f").with_timestamp(time);

        assert_eq!(attachment.timestamp, Some(1_000_000));
    }

    #[test]
    fn pre_epoch_timestamp_clamps_to_zero() {
        let time = UNIX_EPOCH - Duration::from_secs(10);
        let attachment = Attachment::new("f").with_timestamp(time);

        assert_eq!(attachment.timestamp, Some(0));
    }
}

mod builders {
    use super::*;

    #[test]
    fn message_new_has_no_attachments() {
        let msg = Message::new("hi");

        assert_eq!(msg.text, "hi");
        assert!(msg.attachments.is_empty());
    }

    #[test]
    fn field_defaults_to_long() {
        let field = Field::new("a", "b");

        assert!(!field.short);
        assert!(field.short().short);
    }
}
