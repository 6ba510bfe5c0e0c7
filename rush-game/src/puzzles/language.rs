//! Language-guessing rounds: a phrase bank sampled per session.

use rand::Rng;
use rand::seq::SliceRandom;

pub const TOTAL_LANGUAGE_ROUNDS: usize = 3;
pub const POINTS_PER_ROUND: u32 = 40;

pub struct LanguageRound {
    pub family: &'static str,
    pub phrase: &'static str,
    pub answer: &'static str,
    pub options: [&'static str; 4],
}

pub const ROUND_BANK: &[LanguageRound] = &[
    LanguageRound {
        family: "Romance",
        phrase: "Bonjour, comment allez-vous ?",
        answer: "French",
        options: ["French", "Spanish", "Italian", "Portuguese"],
    },
    LanguageRound {
        family: "Romance",
        phrase: "¿Dónde está la estación de tren?",
        answer: "Spanish",
        options: ["Portuguese", "Spanish", "French", "Italian"],
    },
    LanguageRound {
        family: "Germanic",
        phrase: "Guten Morgen, wie geht es dir?",
        answer: "German",
        options: ["Dutch", "German", "Swedish", "Danish"],
    },
    LanguageRound {
        family: "Romance",
        phrase: "Ciao, possiamo iniziare adesso?",
        answer: "Italian",
        options: ["Italian", "Romanian", "Spanish", "Portuguese"],
    },
    LanguageRound {
        family: "Romance",
        phrase: "Obrigada pela ajuda de hoje.",
        answer: "Portuguese",
        options: ["Spanish", "Portuguese", "Italian", "French"],
    },
    LanguageRound {
        family: "Germanic",
        phrase: "Wat is jouw favoriete boek?",
        answer: "Dutch",
        options: ["German", "Danish", "Dutch", "Swedish"],
    },
    LanguageRound {
        family: "Slavic",
        phrase: "Dzień dobry, jak się masz?",
        answer: "Polish",
        options: ["Polish", "Czech", "Ukrainian", "Croatian"],
    },
    LanguageRound {
        family: "Slavic",
        phrase: "Добрый вечер, где находится музей?",
        answer: "Russian",
        options: ["Russian", "Ukrainian", "Bulgarian", "Serbian"],
    },
    LanguageRound {
        family: "Nordic",
        phrase: "God morgen, hva heter du?",
        answer: "Norwegian",
        options: ["Norwegian", "Swedish", "Danish", "Dutch"],
    },
    LanguageRound {
        family: "Nordic",
        phrase: "God eftermiddag, vil du have kaffe?",
        answer: "Danish",
        options: ["Danish", "Swedish", "Norwegian", "German"],
    },
    LanguageRound {
        family: "Uralic",
        phrase: "Hyvaa paivaa, missa kirjasto on?",
        answer: "Finnish",
        options: ["Finnish", "Hungarian", "Estonian", "Latvian"],
    },
    LanguageRound {
        family: "Semitic",
        phrase: "Marhaban, kayfa haluk alyawm?",
        answer: "Arabic",
        options: ["Arabic", "Hebrew", "Turkish", "Persian"],
    },
    LanguageRound {
        family: "Indo-Aryan",
        phrase: "Namaste, aap kaise hain?",
        answer: "Hindi",
        options: ["Hindi", "Bengali", "Urdu", "Punjabi"],
    },
    LanguageRound {
        family: "Indo-Aryan",
        phrase: "Assalamu alaikum, apni kemon achen?",
        answer: "Bengali",
        options: ["Bengali", "Hindi", "Urdu", "Gujarati"],
    },
    LanguageRound {
        family: "Turkic",
        phrase: "Merhaba, bugun nasilsin?",
        answer: "Turkish",
        options: ["Turkish", "Azerbaijani", "Arabic", "Persian"],
    },
    LanguageRound {
        family: "East Asian",
        phrase: "Ni hao, jintian zenmeyang?",
        answer: "Mandarin Chinese",
        options: ["Mandarin Chinese", "Japanese", "Korean", "Vietnamese"],
    },
    LanguageRound {
        family: "East Asian",
        phrase: "Annyeonghaseyo, oneul iljeongi mwoyeyo?",
        answer: "Korean",
        options: ["Korean", "Japanese", "Mandarin Chinese", "Thai"],
    },
    LanguageRound {
        family: "Japonic",
        phrase: "Ohayo gozaimasu, kyo wa naniji desu ka?",
        answer: "Japanese",
        options: ["Japanese", "Korean", "Mandarin Chinese", "Mongolian"],
    },
    LanguageRound {
        family: "Austronesian",
        phrase: "Magandang umaga, saan tayo pupunta?",
        answer: "Tagalog",
        options: ["Tagalog", "Malay", "Indonesian", "Vietnamese"],
    },
    LanguageRound {
        family: "Bantu",
        phrase: "Habari za asubuhi, unaendeleaje?",
        answer: "Swahili",
        options: ["Swahili", "Zulu", "Yoruba", "Amharic"],
    },
    LanguageRound {
        family: "Celtic",
        phrase: "Dia dhuit, conas ata tu?",
        answer: "Irish",
        options: ["Irish", "Welsh", "Scottish Gaelic", "English"],
    },
];

/// One sampled round with shuffled answer options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRoundInstance {
    pub family: &'static str,
    pub phrase: &'static str,
    pub answer: &'static str,
    pub options: Vec<&'static str>,
}

/// Sample `count` distinct rounds from the bank with shuffled options.
pub fn sample_rounds(count: usize, rng: &mut impl Rng) -> Vec<LanguageRoundInstance> {
    let mut order: Vec<usize> = (0..ROUND_BANK.len()).collect();
    order.shuffle(rng);
    order
        .into_iter()
        .take(count)
        .map(|index| {
            let round = &ROUND_BANK[index];
            let mut options = round.options.to_vec();
            options.shuffle(rng);
            LanguageRoundInstance {
                family: round.family,
                phrase: round.phrase,
                answer: round.answer,
                options,
            }
        })
        .collect()
}
