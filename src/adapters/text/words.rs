//! Word lists for generated text

pub const WORDS: &[&str] = &[
    "account", "against", "almost", "anchor", "answer", "apart", "autumn", "balance", "banner",
    "beneath", "bitter", "borrow", "bright", "bundle", "candle", "careful", "castle", "change",
    "circle", "clever", "cloud", "comfort", "common", "copper", "corner", "cotton", "courage",
    "crystal", "daily", "danger", "desert", "detail", "distant", "double", "dream", "eager",
    "early", "engine", "evening", "famous", "feather", "field", "finally", "forest", "fortune",
    "friendly", "garden", "gentle", "golden", "gravity", "harbor", "harvest", "hidden", "honest",
    "island", "journey", "kettle", "kindly", "ladder", "lantern", "later", "lemon", "letter",
    "light", "lively", "market", "meadow", "middle", "minute", "modest", "morning", "mountain",
    "narrow", "nearly", "number", "ocean", "often", "orange", "orbit", "pattern", "pebble",
    "pencil", "people", "planet", "pocket", "polite", "quiet", "quickly", "rabbit", "rapid",
    "really", "record", "river", "rocket", "saddle", "season", "secret", "shadow", "silver",
    "simple", "slowly", "smooth", "signal", "spirit", "spring", "steady", "stone", "summer",
    "sunset", "surely", "table", "thunder", "timber", "today", "travel", "tunnel", "valley",
    "velvet", "village", "violet", "wander", "weather", "window", "winter", "wonder", "yellow",
];

pub const ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP",
    "RSS", "XML", "EXE", "COM", "HDD", "THX", "SMTP", "SMS", "USB", "PNG", "SAS", "IB", "SCSI",
    "JSON", "XSS", "JBOD",
];

pub const ADJECTIVES: &[&str] = &[
    "auxiliary", "primary", "back-end", "digital", "open-source", "virtual", "cross-platform",
    "redundant", "online", "haptic", "multi-byte", "bluetooth", "wireless", "1080p", "neural",
    "optical", "solid state", "mobile",
];

pub const NOUNS: &[&str] = &[
    "driver", "protocol", "bandwidth", "panel", "microchip", "program", "port", "card", "array",
    "interface", "system", "sensor", "firewall", "hard drive", "pixel", "alarm", "feed",
    "monitor", "application", "transmitter", "bus", "circuit", "capacitor", "matrix",
];

pub const VERBS: &[&str] = &[
    "back up", "bypass", "hack", "override", "compress", "copy", "navigate", "index", "connect",
    "generate", "quantify", "calculate", "synthesize", "input", "transmit", "program", "reboot",
    "parse",
];

pub const ING_VERBS: &[&str] = &[
    "backing up", "bypassing", "hacking", "overriding", "compressing", "copying", "navigating",
    "indexing", "connecting", "generating", "quantifying", "calculating", "synthesizing",
    "transmitting", "programming", "parsing",
];

/// Phrase templates. Placeholders: `{abbr}`, `{adj}`, `{noun}`, `{verb}`, `{ing}`.
pub const PHRASES: &[&str] = &[
    "If we {verb} the {noun}, we can get to the {abbr} {noun} through the {adj} {abbr} {noun}",
    "We need to {verb} the {adj} {abbr} {noun}",
    "Try to {verb} the {abbr} {noun}, maybe it will {verb} the {adj} {noun}",
    "You can't {verb} the {noun} without {ing} the {adj} {abbr} {noun}",
    "Use the {adj} {abbr} {noun}, then you can {verb} the {adj} {noun}",
    "The {abbr} {noun} is down, {verb} the {adj} {noun} so we can {verb} the {abbr} {noun}",
    "{ing} the {noun} won't do anything, we need to {verb} the {adj} {abbr} {noun}",
    "I'll {verb} the {adj} {abbr} {noun}, that should {verb} the {abbr} {noun}",
];
