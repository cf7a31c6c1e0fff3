use super::Project;

/// The projects shown on the board, in display order. Identifiers follow the
/// literal position.
pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "Sistema de Visitantes - Liberaê (Beta)",
            "Sistema está em fase de teste e novas funcionalidades estão sendo desenvolvidas.",
            100,
        ),
        Project::new(
            2,
            "Aplicativo Liberaê (Mobile)",
            "Está em desenvolvimento um aplicativo para Android com interface moderna e funcionalidades avançadas.",
            30,
        ),
        Project::new(
            3,
            "DimeX",
            "Aguardando virada do C-Plus para obter acesso de dados Atualizados.",
            90,
        ),
        Project::new(
            4,
            "Sistema de Carregamento 2.0",
            "Versão 2.0 do Sistema de Carregamento com interface moderna e funcionalidades avançadas incluindo Dashboard e Gráficos em tempo real.",
            30,
        ),
    ]
}

#[test]
fn test_catalog() {
    let projects = projects();
    assert_eq!(projects.len(), 4);
    assert_eq!(
        projects.iter().map(|p| p.id.0).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(
        projects.iter().map(|p| p.progress).collect::<Vec<_>>(),
        vec![100, 30, 90, 30]
    );
    assert_eq!(projects[2].name, "DimeX");
}
