use super::AudioRecord;

/// Seed records inserted into the fallback store at startup and into the
/// primary store when its collection is empty. Inline markers such as
/// `[whispers]` are stylistic annotations consumed downstream and are stored
/// verbatim.
pub fn sample_records() -> Vec<AudioRecord> {
    vec![
        AudioRecord::new(
            "english".to_string(),
            "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav".to_string(),
            "In the ancient land of Eldoria, where skies shimmered and forests, \
             whispered secrets to the wind, lived a dragon named Zephyros. \
             [sarcastically] Not the \"burn it all down\" kind... [giggles] but \
             he was gentle, wise, with eyes like old stars. [whispers] Even the \
             birds fell silent when he passed."
                .to_string(),
        ),
        AudioRecord::new(
            "arabic".to_string(),
            "https://www.soundjay.com/misc/sounds/bell-ringing-04.wav".to_string(),
            "في أرض إلدوريا القديمة، حيث تتألق السماء وتهمس الغابات بأسرارها للريح، \
             عاش تنين يُدعى زيفيروس. ليس من النوع الذي يحرق كل شيء... بل كان لطيفاً \
             وحكيماً، بعيون مثل النجوم القديمة. حتى الطيور كانت تصمت عندما يمر."
                .to_string(),
        ),
    ]
}
