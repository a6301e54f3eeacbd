//! User-facing texts.

pub const LIST_ERROR: &str = "Kon de recepten niet laden. Probeer het later opnieuw.";
pub const DETAIL_ERROR: &str = "Kon het recept niet laden. Probeer het later opnieuw.";
pub const FILTERS_ERROR: &str = "Kon de filteropties niet laden.";
pub const CATEGORIES_ERROR: &str = "Kon de categorieën niet laden. Probeer het later opnieuw.";
pub const INGREDIENTS_ERROR: &str = "Kon de ingrediënten niet laden. Probeer het later opnieuw.";
pub const EMPTY_LIST: &str = "Geen recepten gevonden";

pub const CHAT_ERROR: &str =
    "Sorry, er ging iets mis bij het verwerken van je vraag. Probeer het later opnieuw.";

pub const CHAT_WELCOME_ID: &str = "welcome";
pub const CHAT_WELCOME: &str = "Welkom bij de SpiceRoute Assistant! 🌍 Ik ben je culinaire gids voor wereldkeukens. Of je nu op zoek bent naar een pittige Thaise curry, een authentieke Indonesische rendang of kooktechnieken voor de Chinese keuken, ik help je graag verder. Waar gaan we vandaag naartoe?";

pub const CHAT_RESET_ID: &str = "welcome-reset";
pub const CHAT_RESET: &str = "Chat gereset. Hoe kan ik je opnieuw helpen?";
