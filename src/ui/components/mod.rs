pub mod challenge_stats;
pub mod console_view;
pub mod hero;
pub mod menu;
pub mod particle_canvas;
pub mod snippet_list;
pub mod typing_area;
