use super::*;

fn two_section_script() -> Script {
    Script::from_sections([
        (
            SectionId::new(1).unwrap(),
            SectionText {
                subtitle: "Lead".to_string(),
                content: "Lead body".to_string(),
            },
        ),
        (
            SectionId::new(2).unwrap(),
            SectionText {
                subtitle: "Follow-up".to_string(),
                content: "Follow-up body".to_string(),
            },
        ),
    ])
}

#[test]
fn section_lookup_uses_zero_padded_keys() {
    let script = two_section_script();
    assert_eq!(script.len(), 2);
    assert_eq!(
        script.section(SectionId::new(1).unwrap()).unwrap().subtitle,
        "Lead"
    );
    assert_eq!(
        script.section(SectionId::new(2).unwrap()).unwrap().content,
        "Follow-up body"
    );
}

#[test]
fn missing_section_fails_at_point_of_use() {
    let script = two_section_script();
    let err = script.section(SectionId::new(3).unwrap()).unwrap_err();
    match err {
        InfographicError::Generation(msg) => {
            assert!(msg.contains("script has no section \"03\""), "{msg}");
        }
        other => panic!("expected Generation error, got {other:?}"),
    }
}

#[test]
fn iter_is_key_ordered() {
    let script = two_section_script();
    let keys: Vec<&str> = script.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["01", "02"]);
}

#[test]
fn script_serializes_as_plain_map() {
    let script = two_section_script();
    let json = serde_json::to_value(&script).unwrap();
    assert!(json.get("01").is_some());
    assert_eq!(json["02"]["subtitle"], "Follow-up");
    let back: Script = serde_json::from_value(json).unwrap();
    assert_eq!(back, script);
}
