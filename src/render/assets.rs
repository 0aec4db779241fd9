//! Static artifacts shipped with every dossier
//!
//! None of these vary between runs.

/// Handlebars source of the dossier document
pub const DOCUMENT_TEMPLATE: &str = include_str!("../../templates/dossier.html.hbs");

/// Screen stylesheet (`styles.css`)
pub const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// Print stylesheet (`print.css`)
pub const PRINT_STYLESHEET: &str = include_str!("../../assets/print.css");

/// Chart script (`script.js`); reads `window.DOSSIER_DATA`
pub const SCRIPT: &str = include_str!("../../assets/script.js");
