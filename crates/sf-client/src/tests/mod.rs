mod file_store;
mod memory_store;
mod user_profile;
