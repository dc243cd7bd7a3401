use std::env;
use std::process;

use metaphone_ru::{compare, get_phonetic_code};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Some(output) => println!("{}", output),
        None => {
            print_usage();
            process::exit(1);
        }
    }
}

/// Обробка аргументів командного рядка; None — показати довідку.
/// Перше слово "compare" зарезервоване за підкомандою,
/// "--" дозволяє отримати код тексту, що починається з нього
fn run(args: &[String]) -> Option<String> {
    match args.split_first() {
        Some((mode, rest)) if mode == "compare" => {
            if rest.len() != 2 {
                return None;
            }
            Some(compare(&rest[0], &rest[1]).to_string())
        }
        Some((mode, rest)) if mode == "--" => Some(get_phonetic_code(&rest.join(" "))),
        Some(_) => Some(get_phonetic_code(&args.join(" "))),
        None => None,
    }
}

fn print_usage() {
    println!("🔤 Metaphone RU - фонетичне порівняння російських слів");
    println!("======================================================");
    println!("Використання:");
    println!("  metaphone_ru <текст>                   — фонетичний код тексту");
    println!("  metaphone_ru compare <текст А> <текст Б> — кількість фонетичних збігів");
    println!("Слово \"compare\" на початку зарезервоване за підкомандою;");
    println!("щоб отримати код такого тексту, поставте перед ним \"--\"");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_code_mode() {
        assert_eq!(run(&args(&["привет"])).as_deref(), Some("ПРИВИТ"));
        assert_eq!(run(&args(&["кот", "и", "пёс"])).as_deref(), Some("КАТИПИС"));
    }

    #[test]
    fn test_run_compare_mode() {
        assert_eq!(run(&args(&["compare", "кот", "кот"])).as_deref(), Some("1"));
        assert_eq!(run(&args(&["compare", "кот"])), None);
    }

    #[test]
    fn test_run_double_dash_escape() {
        // "--" знімає резервування слова "compare"
        assert_eq!(run(&args(&["--", "compare"])).as_deref(), Some(""));
        assert_eq!(run(&args(&["--", "кот"])).as_deref(), Some("КАТ"));
    }

    #[test]
    fn test_run_no_arguments() {
        assert_eq!(run(&[]), None);
    }
}
