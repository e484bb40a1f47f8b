use store::{Loan, LoanStatus};

pub const EMPTY_HISTORY: &str = "Nenhum empréstimo registrado.";

/// One line of the admin loan table, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct LoanRow {
    pub id: String,
    pub title: String,
    pub user: String,
    pub loan_date: String,
    pub return_date: String,
    pub status: LoanStatus,
}

impl LoanRow {
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            id: format!("#{}", loan.id),
            title: loan.title.clone(),
            user: loan.nome_usuario.clone(),
            loan_date: loan.loan_date.clone(),
            return_date: loan.return_date_or_dash().to_string(),
            status: loan.status(),
        }
    }

    /// Rows in backend order.
    pub fn table(loans: &[Loan]) -> Vec<LoanRow> {
        loans.iter().map(LoanRow::from_loan).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(id: i64, return_date: Option<&str>) -> Loan {
        Loan {
            id,
            title: "Dom Casmurro".to_string(),
            nome_usuario: "Ana".to_string(),
            loan_date: "2024-03-01".to_string(),
            return_date: return_date.map(str::to_string),
        }
    }

    #[test]
    fn test_open_loan_row() {
        let row = LoanRow::from_loan(&loan(12, None));
        assert_eq!(row.id, "#12");
        assert_eq!(row.return_date, "-");
        assert_eq!(row.status.label(), "Emprestado");
        assert_eq!(row.status.class(), "status-borrowed");
    }

    #[test]
    fn test_returned_loan_row() {
        let row = LoanRow::from_loan(&loan(3, Some("2024-03-09")));
        assert_eq!(row.return_date, "2024-03-09");
        assert_eq!(row.status, LoanStatus::Returned);
        assert_eq!(row.status.label(), "Devolvido");
    }

    #[test]
    fn test_table_keeps_order() {
        let rows = LoanRow::table(&[loan(2, None), loan(1, Some("2024-01-01"))]);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["#2", "#1"]);
    }
}
