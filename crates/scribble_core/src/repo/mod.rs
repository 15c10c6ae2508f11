pub mod note_repo;
