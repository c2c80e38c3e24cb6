//! Reusable widgets shared by every page.
//!
//! ```text
//! Icon    - IconRef -> inline SVG
//! Reveal  - one-shot entrance animation wrapper
//! Button  - ButtonStyle-configured <button>
//! Card    - CardStyle-configured container
//! ```

mod button;
mod card;
mod icons;
mod reveal;

pub use button::Button;
pub use card::Card;
pub use icons::Icon;
pub use reveal::Reveal;
