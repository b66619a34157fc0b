//! User-facing text in the UI locale.

pub const LOADING: &str = "Carregando...";
pub const LOADING_EDIT: &str = "Carregando dados da receita...";

pub const LIST_LOAD_FAILED: &str = "Erro ao carregar as receitas.";
pub const DETAIL_LOAD_FAILED: &str = "Erro ao carregar os detalhes da receita.";
pub const EDIT_LOAD_FAILED: &str = "Erro ao carregar os dados da receita.";

pub const DELETE_CONFIRM: &str = "Tem certeza de que deseja excluir esta receita?";
pub const DELETED: &str = "Receita excluída com sucesso!";
pub const DELETE_FAILED: &str = "Erro ao excluir a receita. Por favor, tente novamente.";

pub const CREATE_FAILED: &str = "Erro ao cadastrar a receita.";
pub const UPDATED: &str = "Receita atualizada com sucesso!";
pub const UPDATE_FAILED: &str = "Erro ao salvar as alterações da receita.";

pub const CREATE_HEADING: &str = "Cadastrar Nova Receita";
pub const EDIT_HEADING: &str = "Editar Receita";
