// src/reply/mod.rs
// Reply-generation pipeline: validate, prompt, call provider, normalize, fall back

pub mod fallback;
pub mod generator;
pub mod normalize;
pub mod prompt;
pub mod types;
pub mod validate;

pub use fallback::{RandomSource, SeededRandom, ThreadRandom};
pub use generator::{GenerateError, GeneratedReply, ReplyGenerator, ReplySource};
pub use types::{Mood, Relationship, ReplyRequest, ReplyResponse};
pub use validate::{FieldViolation, ValidationError, ViolationCode, validate_request};
