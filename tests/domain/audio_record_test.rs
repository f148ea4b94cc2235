use narvik::domain::{sample_records, AudioRecord, AudioUpdate};

#[test]
fn given_language_when_deriving_id_then_appends_audio_suffix() {
    assert_eq!(AudioRecord::derive_id("french"), "french_audio");
}

#[test]
fn given_new_record_when_constructed_then_id_matches_language() {
    let record = AudioRecord::new("french".to_string(), "u".to_string(), "t".to_string());

    assert_eq!(record.id, "french_audio");
    assert_eq!(record.language, "french");
    assert_eq!(record.audio_url, "u");
    assert_eq!(record.text_content, "t");
}

#[test]
fn given_update_when_applied_then_language_and_id_are_untouched() {
    let mut record = AudioRecord::new("french".to_string(), "u".to_string(), "t".to_string());
    record.apply(&AudioUpdate {
        audio_url: "u2".to_string(),
        text_content: "t2".to_string(),
    });

    assert_eq!(record.id, "french_audio");
    assert_eq!(record.language, "french");
    assert_eq!(record.audio_url, "u2");
    assert_eq!(record.text_content, "t2");
}

#[test]
fn given_sample_records_then_english_and_arabic_are_present() {
    let records = sample_records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].language, "english");
    assert_eq!(records[0].id, "english_audio");
    assert_eq!(records[1].language, "arabic");
    assert_eq!(records[1].id, "arabic_audio");
}

#[test]
fn given_sample_records_then_annotation_markers_are_stored_verbatim() {
    let records = sample_records();

    assert!(records[0].text_content.contains("[whispers]"));
    assert!(records[0].text_content.contains("[giggles]"));
}
