//! Output macros for the plugman CLI.
//!
//! All user-facing output goes through these macros so every command renders
//! notifications the same way. Message templates live in the binary's
//! `messages` module and use `{variable}` placeholders filled by `msg!`.

#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $template.to_string()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut result = $template.to_string();
            $(
                result = result.replace(&format!("{{{}}}", stringify!($key)), &$value.to_string());
            )+
            result
        }
    };
}

#[macro_export]
macro_rules! pm_print {
    ($($arg:tt)*) => {
        print!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_info {
    ($($arg:tt)*) => {
        eprintln!("ℹ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    }
}
