mod comment_frame;
mod text_information_frame;
mod timestamp_frame;

pub use comment_frame::CommentFrame;
pub use text_information_frame::TextInformationFrame;
pub use timestamp_frame::{TimestampFrame, TimestampValue};
