//! Multilingual keyword stems matched against caregiver notes.
//!
//! Matching is plain substring containment on lowercased notes. "nip" also
//! matches "turnip"; there is no tokenization or negation handling.

#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordSet {
    english: &'static [&'static str],
    spanish: &'static [&'static str],
}

impl KeywordSet {
    /// `lowered_notes` must already be lowercased.
    pub(crate) fn matches(&self, lowered_notes: &str) -> bool {
        if lowered_notes.is_empty() {
            return false;
        }

        self.english
            .iter()
            .chain(self.spanish.iter())
            .any(|stem| lowered_notes.contains(stem))
    }
}

pub(crate) const OVERWHELM: KeywordSet = KeywordSet {
    english: &[
        "overwhelm",
        "frustrat",
        "exhausted",
        "at my wit",
        "can't cope",
        "cant cope",
        "can't do this",
        "give up",
        "losing my mind",
    ],
    spanish: &[
        "abrumad",
        "agobiad",
        "frustrad",
        "agotad",
        "estresad",
        "no puedo más",
        "no puedo mas",
        "me rindo",
    ],
};

pub(crate) const HEALTH: KeywordSet = KeywordSet {
    english: &[
        "vomit",
        "throwing up",
        "threw up",
        "diarrhea",
        "diarrhoea",
        "blood",
        "bleed",
        "injur",
        "limping",
        "poison",
        "toxic",
        "seizure",
        "convuls",
    ],
    spanish: &[
        "vómit",
        "diarrea",
        "sangr",
        "herid",
        "cojea",
        "veneno",
        "envenen",
        "tóxic",
        "convulsi",
    ],
};

pub(crate) const CRATE: KeywordSet = KeywordSet {
    english: &["crate", "kennel", "crying", "cries", "cried", "whin", "howl"],
    spanish: &["jaula", "transportín", "transportin", "llor", "gime", "gimi", "aúll", "aull"],
};

pub(crate) const BITING: KeywordSet = KeywordSet {
    english: &["bite", "biting", "bit me", "nip", "chew", "mouthing"],
    spanish: &["muerde", "mordi", "mordisc", "mordedura"],
};

pub(crate) const BARKING: KeywordSet = KeywordSet {
    english: &["bark", "yap"],
    spanish: &["ladr"],
};
