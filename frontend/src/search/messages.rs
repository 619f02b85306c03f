use crate::search::daily_time::DailyTime;

pub const EMPTY_QUERY: &str = "Digite um termo.";
pub const SEARCH_FAILED: &str = "Erro na busca por esse termo.";

pub const PAGE_TITLE: &str = "Explore vídeos no Youtube";
pub const SEARCH_PLACEHOLDER: &str = "Digite um termo para buscar";
pub const SEARCH_BUTTON: &str = "Pesquisar";
pub const DAILY_TIME_HEADING: &str = "Disponibilidade diaria (minutos)";
pub const WORDS_HEADING: &str = "Palavras mais frequentes";

pub fn daily_time_failed(daily_time: DailyTime) -> String {
    format!(
        "Não foi possível organizar os vídeos com disponibilidade diária de {} minutos.",
        daily_time.key()
    )
}
