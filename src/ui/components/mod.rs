pub mod home;
pub mod movie_card;
pub mod search;
pub mod shell;
pub mod top_bar;
pub mod watch_history;

pub use home::Home;
pub use movie_card::MovieCard;
pub use search::Search;
pub use shell::Shell;
pub use top_bar::TopBar;
pub use watch_history::WatchHistory;
