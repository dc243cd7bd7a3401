/// Модуль обчислення російського Metaphone-коду слова
/// Використовується для пошуку фонетично схожих слів

use once_cell::sync::Lazy;
use regex::Regex;

// Все, що не належить до 33 літер російського алфавіту, видаляється
static NON_ALPHABET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^А-Яа-яЁё]").unwrap());

// Заміни ненаголошених голосних, строго в цьому порядку:
// кожна заміна проходить по всьому рядку, наступна працює
// вже над результатом попередньої
static VOWEL_RULES: &[(&str, &str)] = &[
    ("ЙО", "И"),
    ("ИО", "И"),
    ("ЙЕ", "И"),
    ("ИЕ", "И"),
    ("О", "А"),
    ("Ы", "А"),
    ("Я", "А"),
    ("Е", "И"),
    ("Ё", "И"),
    ("Э", "И"),
    ("Ю", "У"),
];

// Дзвінкі приголосні та їхні глухі пари, у фіксованому порядку обробки
static DEVOICING_PAIRS: &[(&str, &str)] = &[
    ("Б", "П"),
    ("З", "С"),
    ("Д", "Т"),
    ("В", "Ф"),
    ("Г", "К"),
];

// Приголосні, перед якими відбувається оглушення
// (сонорні Л, М, Н, Р та голосні оглушення не викликають)
static DEVOICING_TRIGGERS: &str = "БВГДЖЗЙКПСТФХЦЧШЩ";

struct DevoicingRule {
    // дзвінка перед глухою приголосною: приголосна-тригер зберігається
    before_consonant: Regex,
    before_replacement: String,
    // дзвінка в самому кінці рядка
    at_end: Regex,
    end_replacement: &'static str,
}

static DEVOICING_RULES: Lazy<Vec<DevoicingRule>> = Lazy::new(|| {
    DEVOICING_PAIRS
        .iter()
        .map(|&(voiced, voiceless)| DevoicingRule {
            before_consonant: Regex::new(&format!("{}([{}])", voiced, DEVOICING_TRIGGERS))
                .unwrap(),
            before_replacement: format!("{}${{1}}", voiceless),
            at_end: Regex::new(&format!("{}$", voiced)).unwrap(),
            end_replacement: voiceless,
        })
        .collect()
});

// ТС і ДС звучать як одна африката Ц
static AFFRICATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("ТС|ДС").unwrap());

/// Нормалізація: залишає тільки літери російського алфавіту
/// та приводить їх до верхнього регістру
fn normalize(value: &str) -> String {
    NON_ALPHABET_REGEX.replace_all(value, "").to_uppercase()
}

/// Стискає повтори однакових сусідніх символів до одного символу.
/// У crate regex немає зворотних посилань, тому посимвольний прохід
fn remove_duplicates(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous: Option<char> = None;

    for c in value.chars() {
        if previous != Some(c) {
            result.push(c);
        }
        previous = Some(c);
    }

    result
}

/// Зводить голосні, що звучать однаково без наголосу, до спільної літери
fn reduce_vowels(value: &str) -> String {
    VOWEL_RULES
        .iter()
        .fold(value.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

/// Оглушення дзвінких приголосних перед глухими та в кінці слова.
/// Правила застосовуються послідовно: попереднє оглушення може
/// створити контекст для наступного
fn devoice(value: &str) -> String {
    let mut result = value.to_string();

    for rule in DEVOICING_RULES.iter() {
        result = rule
            .before_consonant
            .replace_all(&result, rule.before_replacement.as_str())
            .into_owned();
        result = rule
            .at_end
            .replace_all(&result, rule.end_replacement)
            .into_owned();
    }

    result
}

/// Склеює ТС і ДС в африкату Ц
fn merge_affricates(value: &str) -> String {
    AFFRICATE_REGEX.replace_all(value, "Ц").into_owned()
}

/// Обчислює фонетичний код тексту.
/// Повне перетворення: нормалізація → видалення повторів →
/// редукція голосних → оглушення → африкати → видалення повторів.
/// Ніколи не завершується помилкою, для порожнього входу повертає ""
pub fn get_phonetic_code(value: &str) -> String {
    let value = normalize(value);
    let value = remove_duplicates(&value);
    let value = reduce_vowels(&value);
    let value = devoice(&value);
    let value = merge_affricates(&value);
    remove_duplicates(&value)
}
