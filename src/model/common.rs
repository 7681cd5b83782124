/// Primary key type shared by every table.
pub type Id = i64;
