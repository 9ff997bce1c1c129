pub mod health;
pub mod list_tracks;
pub mod get_track_by_id;
pub mod create_track;
pub mod update_track;
pub mod delete_track;
