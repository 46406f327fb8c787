use crate::evaluator::Criterion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Evaluate(Criterion),
    ShowAll,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            n @ 1..=5 => Criterion::ALL
                .get(usize::from(n - 1))
                .copied()
                .map(MenuChoice::Evaluate),
            6 => Some(MenuChoice::ShowAll),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn render_menu() -> String {
    let mut menu = String::from("\n--- METHOD SELECTION ---\n");
    for (i, criterion) in Criterion::ALL.iter().enumerate() {
        if *criterion == Criterion::MinimaxRegret {
            menu.push_str(&format!("{}: {}\n", i + 1, criterion.name()));
        } else {
            menu.push_str(&format!(
                "{}: {} ({})\n",
                i + 1,
                criterion.name(),
                criterion.attitude()
            ));
        }
    }
    menu.push_str("6: Show All Results\n");
    menu.push_str("7: Exit\n");
    menu
}
