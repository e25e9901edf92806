use proptest::prelude::*;
use quiz_import::{export, parse, QuizQuestion};

fn words(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..=max_words).prop_map(|w| w.join(" "))
}

fn prompt() -> impl Strategy<Value = String> {
    (words(6), prop::option::of(Just("?"))).prop_map(|(text, mark)| {
        format!("{}{}", text, mark.unwrap_or_default())
    })
}

fn option_text() -> impl Strategy<Value = String> {
    prop_oneof![1 => Just(String::new()), 4 => words(3)]
}

fn question() -> impl Strategy<Value = QuizQuestion> {
    prop_oneof![
        (prompt(), prop::collection::vec(option_text(), 2..=6), 0usize..6)
            .prop_map(|(text, options, correct)| QuizQuestion::multiple_choice(text, options, correct)),
        (prompt(), 0usize..2).prop_map(|(text, correct)| QuizQuestion::true_false(text, correct)),
        (prompt(), 0usize..2).prop_map(|(text, correct)| QuizQuestion::yes_no(text, correct)),
        (prompt(), prop_oneof![Just(String::new()), words(4)])
            .prop_map(|(text, sample)| QuizQuestion::short_answer(text, sample)),
    ]
}

/// A prompt broken over several lines with ragged spacing.
fn wrapped_prompt() -> impl Strategy<Value = String> {
    prop::collection::vec(words(3), 1..=3).prop_map(|lines| lines.join("\n  "))
}

/// A pasted block in the heuristic format whose prompt spans lines.
fn pasted_block() -> impl Strategy<Value = String> {
    prop_oneof![
        (wrapped_prompt(), prop_oneof![Just("True"), Just("False")])
            .prop_map(|(text, correct)| format!("Type: TF\n{}\nCorrect: {}", text, correct)),
        (wrapped_prompt(), prop_oneof![Just("Yes"), Just("No")])
            .prop_map(|(text, correct)| format!("Type: YN\n{}\nCorrect: {}", text, correct)),
        (wrapped_prompt(), wrapped_prompt())
            .prop_map(|(text, answer)| format!("Type: SA\n{}\nAnswer: {}", text, answer)),
        wrapped_prompt().prop_map(|text| format!("{}\nA. x\nB. y", text)),
    ]
}

proptest! {
    #[test]
    fn pasted_multi_line_prompts_survive_export(blocks in prop::collection::vec(pasted_block(), 1..5)) {
        let input = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| format!("{}. {}", i + 1, block))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = parse(&input);
        prop_assert_eq!(parsed.len(), blocks.len());
        for q in &parsed {
            prop_assert!(!q.text.contains('\n'));
            prop_assert!(!q.sample_answer.contains('\n'));
        }
        prop_assert_eq!(parse(&export(&parsed)), parsed);
    }

    #[test]
    fn export_then_parse_reproduces_questions(questions in prop::collection::vec(question(), 0..8)) {
        let text = export(&questions);
        prop_assert_eq!(parse(&text), questions);
    }

    #[test]
    fn parse_is_deterministic(input in "[ -~\n]{0,200}") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn parsed_questions_hold_invariants(input in "[ -~\n]{0,200}") {
        for q in parse(&input) {
            prop_assert!(!q.text.trim().is_empty());
            if q.is_choice() {
                prop_assert!(q.options.len() >= 2 && q.options.len() <= 6);
                prop_assert!(q.correct_index < q.options.len());
            } else {
                prop_assert!(q.options.is_empty());
            }
        }
    }

    #[test]
    fn inline_options_parse(
        text in prompt(),
        options in prop::collection::vec("[a-z]{1,8}", 2..=6),
    ) {
        let mut input = format!("{} ", text);
        for (i, option) in options.iter().enumerate() {
            input.push_str(&format!("{}. {} ", (b'A' + i as u8) as char, option));
        }

        let parsed = parse(&input);
        prop_assert_eq!(parsed.len(), 1);
        prop_assert_eq!(&parsed[0].text, &text);
        prop_assert_eq!(&parsed[0].options, &options);
        prop_assert_eq!(parsed[0].correct_index, 0);
    }

    #[test]
    fn answer_key_sets_correct_index(
        count in 1usize..5,
        letters in prop::collection::vec(0usize..6, 5),
    ) {
        let mut input = String::new();
        for n in 1..=count {
            input.push_str(&format!("{}. Question {}\nA. x\nB. y\nC. z\n", n, n));
        }
        input.push_str("\nAnswer Key\n");
        for n in 1..=count {
            input.push_str(&format!("{}. {}\n", n, (b'A' + letters[n - 1] as u8) as char));
        }

        let parsed = parse(&input);
        prop_assert_eq!(parsed.len(), count);
        for (i, q) in parsed.iter().enumerate() {
            prop_assert_eq!(q.correct_index, letters[i].min(2));
        }
    }
}
