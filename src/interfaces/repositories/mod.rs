pub mod contact;
pub mod projects;
pub mod supabase_repo;
