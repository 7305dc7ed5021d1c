pub mod option_letter;
pub mod question;

pub use option_letter::OptionLetter;
pub use question::{AnswerRecord, QuestionRecord, RecordMetadata};
