pub mod default_day;
pub mod markup;
pub mod model;
pub mod schedule;
pub mod slug;
pub mod template;
