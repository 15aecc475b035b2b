pub mod welcome_page;
