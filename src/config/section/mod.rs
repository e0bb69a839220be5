//! Configuration section definitions.
//!
//! Each module corresponds to a key in `quire.toml`:
//!
//! | Module  | Key               | Purpose                                 |
//! |---------|-------------------|-----------------------------------------|
//! | `head`  | `head`            | Ordered `<head>` tag injections         |
//! | `links` | `ignoreDeadLinks` | Dead link checker exemptions            |
//! | `theme` | `themeConfig`     | Nav, sidebar, social links, footer, ... |

pub mod head;
pub mod links;
pub mod theme;

pub use head::{DependencyViolation, HeadInjection, HeadTag};
pub use links::{DeadLinkExemption, ExemptPattern, PatternError};
pub use theme::ThemeConfig;
