pub mod track_repository;
