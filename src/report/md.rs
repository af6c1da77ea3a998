use crate::types::result::{QuizResult, ScoredVaporizer};

pub fn to_markdown(result: &QuizResult) -> String {
    let mut output = String::new();
    output.push_str("# Match Report\n\n");

    let top = &result.top_pick;
    output.push_str("## Top Pick\n\n");
    output.push_str(&format!(
        "**{}** by {} — {}% match (${:.0}, {})\n\n",
        top.item.name,
        top.item.manufacturer,
        top.match_percent,
        top.item.price,
        top.item.kind.label()
    ));
    output.push_str(&format!("{}\n\n", result.explanation));

    if !top.item.pros.is_empty() {
        output.push_str("Pros:\n");
        for pro in &top.item.pros {
            output.push_str(&format!("- {pro}\n"));
        }
        output.push('\n');
    }
    if !top.item.cons.is_empty() {
        output.push_str("Cons:\n");
        for con in &top.item.cons {
            output.push_str(&format!("- {con}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Alternates\n\n");
    if result.alternates.is_empty() {
        output.push_str("- none\n");
    } else {
        for alternate in &result.alternates {
            output.push_str(&line(alternate));
        }
    }

    output
}

fn line(scored: &ScoredVaporizer) -> String {
    format!(
        "- {} ({}% match, ${:.0}, {})\n",
        scored.item.name,
        scored.match_percent,
        scored.item.price,
        scored.item.kind.label()
    )
}
