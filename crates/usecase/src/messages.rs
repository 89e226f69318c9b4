// crates/usecase/src/messages.rs

/// Language of the texts printed around the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

/// Catalog of user-facing texts. Layout never depends on it.
#[derive(Debug)]
pub struct Messages {
    /// Header template; `{}` is replaced by the 1-based task number.
    pub task_header: &'static str,
    pub file_prompt: &'static str,
    pub distinct_words: &'static str,
    pub sorted_words: &'static str,
    pub word_counts: &'static str,
    pub reversed_file: &'static str,
    pub original_file: &'static str,
    pub reversed_by_iterator: &'static str,
    pub line_prompt: &'static str,
    pub no_such_line: &'static str,
}

pub const SEPARATOR: &str = "----------------------------------";

static EN: Messages = Messages {
    task_header: "Task #{}",
    file_prompt: "Enter file name:",
    distinct_words: "Number of distinct words in the file: ",
    sorted_words: "Sorted list:",
    word_counts: "Word count:",
    reversed_file: "File in reverse order:",
    original_file: "Original file:",
    reversed_by_iterator: "File in reverse order using iterator:",
    line_prompt: "Enter a line number:",
    no_such_line: "No such line.",
};

static RU: Messages = Messages {
    task_header: "Задание №{}",
    file_prompt: "Введите имя файла: ",
    distinct_words: "Количество различных слов в файле: ",
    sorted_words: "Отсортированный список:",
    word_counts: "Подсчет слов:",
    reversed_file: "Файл в обратном порядке:",
    original_file: "Исходный файл:",
    reversed_by_iterator: "Файл в обратном порядке используя итератор:",
    line_prompt: "Введите номер произвольной строки:",
    no_such_line: "Такой строки нет.",
};

impl Messages {
    pub fn header(&self, number: usize) -> String {
        self.task_header.replacen("{}", &number.to_string(), 1)
    }
}
