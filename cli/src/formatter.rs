use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use onset::{Card, Die, DieFlag, OperationResult, PuzzleRecord, Solution, SolutionStats};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_solve_summary(
        &self,
        record: &PuzzleRecord,
        stats: &SolutionStats,
        shortest: Option<&Solution>,
        complement_required: bool,
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!("Puzzle {}\n", record.id));
        output.push_str(&self.format_cards_table(&record.cards));
        output.push('\n');

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Property").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
        ]));

        let rows = vec![
            ("Dice", format_dice(&record.dice)),
            ("Goal", record.goal.to_string()),
            ("Solutions", stats.total_solutions.to_string()),
            ("Shortest", format_cube_count(stats.shortest_cube_count)),
            ("Longest", format_cube_count(stats.longest_cube_count)),
            (
                "Complement required",
                if complement_required { "yes" } else { "no" }.to_string(),
            ),
            (
                "Shortest solution",
                shortest
                    .map(Solution::canonical)
                    .unwrap_or_else(|| "none".to_string()),
            ),
        ];
        for (name, value) in &rows {
            table.add_row(Row::from(vec![*name, value.as_str()]));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn format_solutions(&self, solutions: &[Solution]) -> String {
        if solutions.is_empty() {
            return "No solutions\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Restriction").set_alignment(CellAlignment::Left),
            Cell::new("Set name").set_alignment(CellAlignment::Left),
            Cell::new("Dice").set_alignment(CellAlignment::Right),
        ]));

        for (i, solution) in solutions.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(solution.top_row().unwrap_or_default()),
                Cell::new(solution.bottom_row()),
                Cell::new(solution.cube_count()).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_evaluation(&self, record: &PuzzleRecord, result: &OperationResult) -> String {
        match result {
            OperationResult::Veto(reason) => {
                format!(
                    "No result: {}\n",
                    reason.as_deref().unwrap_or("restriction does not hold")
                )
            }
            OperationResult::Value(set) => {
                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.set_header(Row::from(vec![
                    Cell::new("Card").set_alignment(CellAlignment::Right),
                    Cell::new("Colors").set_alignment(CellAlignment::Left),
                ]));
                for index in set.iter() {
                    let colors = record
                        .cards
                        .get(index)
                        .map(format_card)
                        .unwrap_or_default();
                    table.add_row(Row::from(vec![
                        Cell::new(index).set_alignment(CellAlignment::Right),
                        Cell::new(colors),
                    ]));
                }

                let goal_note = if set.len() == record.goal {
                    " (goal reached)"
                } else {
                    ""
                };
                format!(
                    "{}\n{} of {} cards matched{}\n",
                    table,
                    set.len(),
                    record.cards.len(),
                    goal_note
                )
            }
        }
    }

    fn format_cards_table(&self, cards: &[Card]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Card").set_alignment(CellAlignment::Right),
            Cell::new("Colors").set_alignment(CellAlignment::Left),
        ]));

        for (index, card) in cards.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(index).set_alignment(CellAlignment::Right),
                Cell::new(format_card(card)),
            ]));
        }

        table.to_string()
    }
}

fn format_card(card: &Card) -> String {
    if card.colors.is_empty() {
        return "-".to_string();
    }
    let names: Vec<&str> = card.colors.iter().map(|c| c.name()).collect();
    names.join(", ")
}

/// Dice in pool order; a flagged die shows its flag
fn format_dice(dice: &[Die]) -> String {
    let faces: Vec<String> = dice
        .iter()
        .map(|die| {
            let flag = match die.flag {
                Some(DieFlag::Required) => " (required)",
                Some(DieFlag::Wild) => " (wild)",
                Some(DieFlag::Bonus) => " (bonus)",
                None => "",
            };
            format!("{}{}", die.value(), flag)
        })
        .collect();
    faces.join("  ")
}

fn format_cube_count(count: Option<usize>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}
