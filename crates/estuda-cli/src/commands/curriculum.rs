//! Curriculum browsing commands.

use std::error::Error;

use clap::Subcommand;
use estuda_core::{Curriculum, Priority};

#[derive(Subcommand)]
pub enum CurriculumAction {
    /// List disciplines with priority and theme count
    List,
    /// Print one discipline, themes and sub-themes included
    Show { id: String },
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Alta => "alta",
        Priority::Media => "média",
        Priority::Baixa => "baixa",
    }
}

pub fn run(action: CurriculumAction) -> Result<(), Box<dyn Error>> {
    let curriculum = Curriculum::builtin();

    match action {
        CurriculumAction::List => {
            for d in &curriculum.disciplinas {
                println!(
                    "{:<20} {:<28} [{}] {} temas",
                    d.id,
                    d.nome,
                    priority_label(d.priority),
                    d.themes.len()
                );
            }
        }
        CurriculumAction::Show { id } => {
            let disciplina = curriculum
                .disciplina(&id)
                .ok_or_else(|| format!("unknown discipline: {id}"))?;
            crate::common::print_json(disciplina)?;
        }
    }
    Ok(())
}
