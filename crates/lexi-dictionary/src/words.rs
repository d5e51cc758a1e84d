/// Words offered by the "random word" action. The dictionary API has no
/// random endpoint, so one of these is picked and looked up normally.
pub const FALLBACK_WORDS: &[&str] = &[
    "serendipity",
    "ephemeral",
    "luminous",
    "wanderlust",
    "mellifluous",
    "resilience",
    "labyrinth",
    "solitude",
    "eloquent",
    "nostalgia",
    "horizon",
    "whimsical",
    "tranquil",
    "paradox",
    "zenith",
    "cascade",
    "ineffable",
    "halcyon",
    "sonder",
    "petrichor",
    "quintessential",
    "ethereal",
    "epiphany",
    "serene",
    "vivid",
    "obscure",
    "radiant",
    "velvet",
    "drift",
    "ember",
    "meadow",
    "twilight",
    "harbor",
    "lantern",
    "echo",
    "voyage",
    "bloom",
    "glimmer",
    "thistle",
    "aurora",
];
