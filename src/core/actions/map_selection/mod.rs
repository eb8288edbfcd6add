pub mod map_selection;
