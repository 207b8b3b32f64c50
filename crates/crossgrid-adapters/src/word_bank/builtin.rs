//! The bundled culture word list.

use crossgrid_core::{domain::WordBank, error::CrosswordResult};

/// `(word, clue)` pairs shipped with crossgrid.
pub const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("AF", "Emphatic slang acronym"),
    ("ICE", "Agency sparking Jan '26 protests"),
    ("IDA", "Actress Brooke of 'Dune 3'"),
    ("YAM", "'Survivor' winner ___ Yam Arocho"),
    ("DAP", "Handshake gesture (slang)"),
    ("DUB", "A win, short for 'W'"),
    ("BAE", "Significant other"),
    ("ISS", "Crew-11 left this station early"),
    ("DUNE", "Villeneuve's 2026 sci-fi epic"),
    ("LISA", "Blackpink star in 'White Lotus'"),
    ("ROSE", "The Black Label K-pop artist"),
    ("TACO", "Controversial 2026 political acronym"),
    ("FAFO", "Diplomatic warning acronym ('Find Out')"),
    ("DOGE", "Musk-led Dept. of Gov Efficiency"),
    ("EPIC", "Fortnite developer"),
    ("PUBG", "Krafton's battle royale game"),
    ("ADDY", "Address, in Gen Z slang"),
    ("WALZ", "Minnesota Governor Tim"),
    ("LETO", "Paul Atreides' son"),
    ("ELLA", "Singer Langley ('Choosin' Texas')"),
    ("VOGUE", "Madonna hit or trend status"),
    ("FRESH", "Cool or new"),
    ("CHANI", "Zendaya's 'Dune' role"),
    ("SWIFT", "Singer of 'The Fate of Ophelia'"),
    ("DRAMA", "Genre of 'The White Lotus'"),
    ("TRAIN", "Hydrogen-powered vehicle in India"),
    ("GHOLA", "Resurrected Duncan Idaho"),
    ("CROCS", "Shoe brand collabing with Simpsons"),
    ("OASIS", "Band rumored for Knebworth '26"),
    ("WALLEN", "Country star Morgan"),
    ("VBUCKS", "Fortnite currency"),
    ("MOJANG", "Minecraft developer"),
    ("WARREN", "Singer Alex of 'Ordinary'"),
    ("ISLAND", "Fortnite Creative location"),
    ("OPHELIA", "Swift's 13-week #1 hit"),
    ("KRAFTON", "Gaming giant investing in K-pop"),
    ("BRITPOP", "Robbie Williams' 2026 album"),
    ("SCYTALE", "'Dune' Face Dancer villain"),
    ("GHANIMA", "Daughter of Paul Atreides"),
    ("BELINDA", "Spa manager in 'White Lotus' S3"),
    ("THAILAND", "Setting for 'White Lotus' Season 3"),
    ("HYDROGEN", "Fuel for new Indian trains"),
    ("SHOWGIRL", "Swift album 'Life of a ___'"),
    ("MANINEED", "Olivia Dean hit song"),
    ("CHOPPLEGANGER", "TikTok term for an 'ugly' lookalike"),
];

/// Build the bundled bank.
pub fn builtin_bank() -> CrosswordResult<WordBank> {
    let mut builder = WordBank::builder();
    for (word, clue) in BUILTIN_ENTRIES {
        builder.insert(word, *clue)?;
    }
    Ok(builder.build()?)
}
