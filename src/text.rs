// Greedy word wrap for card text.
//
// Existing newlines are hard breaks; each line is wrapped on its own. A word
// longer than the limit is never split.

/// Wrap `text` so no line is longer than `max_chars` characters.
pub fn wrap_text(text: &str, max_chars: usize) -> String {
    let mut out: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if char_len(line) <= max_chars {
            out.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split(' ') {
            if current.is_empty() {
                current = word.to_string();
            } else if char_len(&current) + 1 + char_len(word) <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                out.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
    }

    out.join("\n")
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
