// Política de autorização do recurso de usuários, concentrada em um único
// ponto: (principal, alvo, ação) -> permitido ou não.

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::user::{Role, User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Create,
    List,
    Read,
    // `changes_role` indica se o corpo do PATCH tenta mexer no papel.
    Update { changes_role: bool },
    Delete,
}

// Admin pode tudo, inclusive alterar `role`.
// Usuário comum só age sobre a própria conta e nunca altera `role`.
pub fn authorize(principal: &User, target: Option<Uuid>, action: UserAction) -> Result<(), AppError> {
    if principal.role == Role::Admin {
        return Ok(());
    }

    match action {
        UserAction::Create | UserAction::List => Err(AppError::Forbidden),
        UserAction::Read | UserAction::Delete => {
            if target == Some(principal.id) {
                Ok(())
            } else {
                Err(AppError::Forbidden)
            }
        }
        UserAction::Update { changes_role } => {
            if target != Some(principal.id) {
                return Err(AppError::Forbidden);
            }
            if changes_role {
                // Rejeita em vez de ignorar: escalada silenciosa nunca acontece.
                return Err(AppError::RoleChangeNotAllowed);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_role(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            email: "conta@escola.com".to_string(),
            name: "Conta".to_string(),
            password: "$2b$10$hash".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn admin_age_sobre_qualquer_conta() {
        let admin = user_with_role(Role::Admin);
        let outro = Uuid::new_v4();

        for action in [
            UserAction::Create,
            UserAction::List,
            UserAction::Read,
            UserAction::Update { changes_role: true },
            UserAction::Delete,
        ] {
            assert!(authorize(&admin, Some(outro), action).is_ok());
        }
    }

    #[test]
    fn usuario_so_le_e_apaga_a_propria_conta() {
        let user = user_with_role(Role::User);
        let outro = Uuid::new_v4();

        assert!(authorize(&user, Some(user.id), UserAction::Read).is_ok());
        assert!(authorize(&user, Some(user.id), UserAction::Delete).is_ok());

        assert!(matches!(
            authorize(&user, Some(outro), UserAction::Read),
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            authorize(&user, Some(outro), UserAction::Delete),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn usuario_nao_cria_nem_lista() {
        let user = user_with_role(Role::User);
        assert!(matches!(
            authorize(&user, None, UserAction::Create),
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            authorize(&user, None, UserAction::List),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn usuario_atualiza_a_propria_conta_sem_mudar_role() {
        let user = user_with_role(Role::User);

        assert!(authorize(&user, Some(user.id), UserAction::Update { changes_role: false }).is_ok());

        // Tentar escalar o próprio papel é rejeitado, nunca aplicado em silêncio.
        assert!(matches!(
            authorize(&user, Some(user.id), UserAction::Update { changes_role: true }),
            Err(AppError::RoleChangeNotAllowed)
        ));

        assert!(matches!(
            authorize(&user, Some(Uuid::new_v4()), UserAction::Update { changes_role: false }),
            Err(AppError::Forbidden)
        ));
    }
}
