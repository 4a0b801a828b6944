use senalba_relatorios_server::render::pdf::{render_table, PdfTableSpec};
use senalba_relatorios_server::render::{xlsx, Cell, ColumnWidths, SheetSpec};

#[cfg(test)]
mod render_tests {
    use super::*;

    fn sample_sheet() -> SheetSpec {
        SheetSpec::table(
            "Empresas",
            vec!["Nome".to_string(), "Cidade".to_string()],
            vec![
                vec![Cell::Text("Acme".to_string()), Cell::Text("Recife".to_string())],
                vec![Cell::Text("Beta".to_string()), Cell::Text("Olinda".to_string())],
            ],
        )
    }

    #[test]
    fn workbook_bytes_are_a_zip_archive() {
        let bytes = xlsx::write_workbook(&[sample_sheet()]).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn workbook_accepts_multiple_sheets() {
        let detail = sample_sheet();
        let summary = SheetSpec {
            header_fill: 0xEEEEEE,
            column_widths: ColumnWidths::PerColumn(vec![20.0, 25.0]),
            ..SheetSpec::table(
                "Resumo",
                vec!["Opção".to_string(), "Quantidade".to_string()],
                vec![vec![Cell::Text("Sim".to_string()), Cell::Number(2.0)]],
            )
        };
        let bytes = xlsx::write_workbook(&[detail, summary]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn workbook_renders_titles_footers_and_money() {
        let sheet = SheetSpec {
            title: Some("Despesas Mensais Maio 2024".to_string()),
            footer: vec![vec![
                Cell::Text("TOTAL".to_string()),
                Cell::Money(1234.56),
            ]],
            autofilter: true,
            header_fill: 0x4472C4,
            header_on_dark: true,
            column_widths: ColumnWidths::Fixed(22.0),
            ..sample_sheet()
        };
        let bytes = xlsx::write_workbook(&[sheet]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn pdf_bytes_carry_the_document_magic() {
        let spec = PdfTableSpec {
            org_name: "Senalba MG".to_string(),
            title: "Relatório de Empresas".to_string(),
            headers: vec!["Nome".to_string(), "Cidade".to_string()],
            rows: vec![vec!["Acme".to_string(), "Recife".to_string()]],
            logo_jpeg: None,
        };
        let bytes = render_table(&spec).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_paginates_long_tables() {
        let rows: Vec<Vec<String>> = (0..200)
            .map(|i| vec![format!("Empresa {i}"), format!("Cidade {i}")])
            .collect();
        let spec = PdfTableSpec {
            org_name: "Senalba MG".to_string(),
            title: "Relatório de Empresas".to_string(),
            headers: vec!["Nome".to_string(), "Cidade".to_string()],
            rows,
            logo_jpeg: None,
        };
        let bytes = render_table(&spec).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_survives_an_invalid_logo() {
        let spec = PdfTableSpec {
            org_name: "Senalba MG".to_string(),
            title: "Relatório de Empresas".to_string(),
            headers: vec!["Nome".to_string()],
            rows: vec![vec!["Acme".to_string()]],
            logo_jpeg: Some(vec![0x00, 0x01, 0x02, 0x03]),
        };
        let bytes = render_table(&spec).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
