use crate::dashboard::Dashboard;
use crate::stats::Statistics;
use std::io::{self, Write};

pub fn display_details(out: &mut impl Write, d: &Dashboard) -> io::Result<()> {
    for card in d.cards() {
        writeln!(
            out,
            "{}: {}% [{}]",
            card.project.name, card.project.progress, card.status
        )?;
    }
    writeln!(out)
}

pub fn display_stats(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Total de Projetos: {}", stats.total)?;
    match stats.average_progress {
        Some(average) => writeln!(out, "Progresso Médio: {average}%")?,
        None => writeln!(out, "Progresso Médio: -")?,
    }
    writeln!(out, "Quase Concluídos: {}", stats.almost_done)
}

#[cfg(test)]
use crate::theme::Theme;

#[test]
fn test_summary() {
    let d = Dashboard::new(Theme::Light);
    let mut out = Vec::new();
    display_details(&mut out, &d).unwrap();
    display_stats(&mut out, &d.statistics()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Sistema de Visitantes - Liberaê (Beta): 100% [Concluído]\n\
         Aplicativo Liberaê (Mobile): 30% [Iniciado]\n\
         DimeX: 90% [Em Andamento]\n\
         Sistema de Carregamento 2.0: 30% [Iniciado]\n\
         \n\
         Total de Projetos: 4\n\
         Progresso Médio: 63%\n\
         Quase Concluídos: 2\n"
    );
}

#[test]
fn test_empty_stats() {
    let d = Dashboard::with_projects(Vec::new(), Theme::Dark);
    let mut out = Vec::new();
    display_stats(&mut out, &d.statistics()).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Progresso Médio: -\n"));
}
