// Console logging macros. Each line is stamped with local time and coloured by severity.

#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {{
        println!(
            "{}[{}] {}+ {}",
            ::better_term::Color::White,
            ::chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            ::better_term::Color::Green,
            format!($($arg)*)
        );
        ::better_term::flush_styles();
    }};
}

#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {{
        println!(
            "{}[{}] {}> {}",
            ::better_term::Color::White,
            ::chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            ::better_term::Color::Cyan,
            format!($($arg)*)
        );
        ::better_term::flush_styles();
    }};
}

#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {{
        println!(
            "{}[{}] {}! {}",
            ::better_term::Color::White,
            ::chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            ::better_term::Color::Yellow,
            format!($($arg)*)
        );
        ::better_term::flush_styles();
    }};
}

#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {{
        eprintln!(
            "{}[{}] {}x {}",
            ::better_term::Color::White,
            ::chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            ::better_term::Color::Red,
            format!($($arg)*)
        );
        ::better_term::flush_styles();
    }};
}
