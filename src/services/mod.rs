pub mod answer_parser;
pub mod label;
pub mod merger;
pub mod question_parser;
pub mod record_writer;
pub mod text_dump;

pub use answer_parser::AnswerParser;
pub use merger::{merge, MergeSummary};
pub use question_parser::QuestionParser;
pub use record_writer::RecordWriter;
pub use text_dump::TextDumpWriter;
