//! Two-player UNO with a trivia twist: draw cards can be dodged by answering
//! a question correctly.

pub mod card;
pub mod challenge;
pub mod color;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod player;
pub mod question;
pub mod session;
pub mod turn;
pub mod uno;
