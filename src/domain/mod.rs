pub mod entities;
pub mod fallback;
pub mod theme;
pub mod use_cases;
