/// Модуль пословного порівняння двох текстів за фонетичними кодами

use crate::metaphone::get_phonetic_code;

/// Фонетичні коди всіх слів тексту.
/// Слова розділяються пробільними символами, порожні токени відкидаються
pub fn phonetic_codes(value: &str) -> Vec<String> {
    value.split_whitespace().map(get_phonetic_code).collect()
}

/// Кількість пар слів з однаковим фонетичним кодом.
/// Повний добуток: слово, що повторюється, враховується кожного разу.
/// Коди обчислюються один раз перед вкладеним циклом
pub fn compare(first: &str, second: &str) -> usize {
    let first_codes = phonetic_codes(first);
    let second_codes = phonetic_codes(second);

    let mut matches = 0;
    for code_a in &first_codes {
        for code_b in &second_codes {
            if code_a == code_b {
                matches += 1;
            }
        }
    }

    matches
}
