mod daily_menu;

pub use daily_menu::DailyMenu;
