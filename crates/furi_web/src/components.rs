//! Custom components.

use crate::context::get_records;
use furi_core::FuriganaRecord;
use leptos::prelude::*;

/// The body rows of a records table, one per record in input order.
pub fn table_rows(records: &[FuriganaRecord]) -> Vec<[String; 5]> {
    records
        .iter()
        .map(|record| record.cells().map(str::to_string))
        .collect()
}

/// Renders records as a table with one column per record field.
#[component]
pub fn Table(#[prop(into)] records: Signal<Vec<FuriganaRecord>>) -> impl IntoView {
    let header = FuriganaRecord::HEADERS
        .into_iter()
        .map(|header| view! { <th>{header}</th> })
        .collect_view();
    let rows = move || {
        records.with(|records| {
            table_rows(records)
                .into_iter()
                .map(|row| {
                    let cells = row
                        .into_iter()
                        .map(|cell| view! { <td>{cell}</td> })
                        .collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view()
        })
    };

    view! {
        <table class="table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    }
}

#[component]
pub fn LoadButton() -> impl IntoView {
    let store = get_records();
    view! {
        <button class="button" on:click=move |_ev| store.load()>
            "Load Records"
        </button>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_table_has_no_rows() {
        assert!(table_rows(&[]).is_empty());
    }

    #[test]
    fn rows_follow_input_order() {
        let records = vec![
            FuriganaRecord::new("猫", "ねこ", "cat", "", "<ruby>猫<rt>ねこ</rt></ruby>"),
            FuriganaRecord::new("犬", "いぬ", "dog", "note", "<ruby>犬<rt>いぬ</rt></ruby>"),
            FuriganaRecord::new("猫", "ねこ", "cat", "", "<ruby>猫<rt>ねこ</rt></ruby>"),
        ];
        let rows = table_rows(&records);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            ["猫", "ねこ", "cat", "", "<ruby>猫<rt>ねこ</rt></ruby>"].map(String::from)
        );
        assert_eq!(
            rows[1],
            ["犬", "いぬ", "dog", "note", "<ruby>犬<rt>いぬ</rt></ruby>"].map(String::from)
        );
        // duplicates are kept
        assert_eq!(rows[2], rows[0]);
    }

    #[test]
    fn rows_are_deterministic() {
        let records = vec![FuriganaRecord::new("日", "にち", "day", "", "")];
        assert_eq!(table_rows(&records), table_rows(&records));
    }

    #[cfg(feature = "ssr")]
    fn render(records: Vec<FuriganaRecord>) -> String {
        Owner::new().with(|| {
            let records = RwSignal::new(records).read_only();
            view! { <Table records/> }.to_html()
        })
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_header_only_for_no_records() {
        let html = render(vec![]);
        assert_eq!(html.matches("<tr").count(), 1);
        assert_eq!(html.matches("<th>").count(), 5);
        assert_eq!(html.matches("<td").count(), 0);
        for header in FuriganaRecord::HEADERS {
            assert!(html.contains(&format!(">{header}<")), "missing {header}");
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_one_row_per_record() {
        let html = render(vec![
            FuriganaRecord::new("日", "にち", "day", "", "<ruby>日<rt>にち</rt></ruby>"),
            FuriganaRecord::new("猫", "ねこ", "cat", "pet", "<ruby>猫<rt>ねこ</rt></ruby>"),
        ]);
        assert_eq!(html.matches("<tr").count(), 3);
        assert_eq!(html.matches("<td").count(), 10);
        // rows keep the input order
        let day = html.find(">day<").unwrap();
        let cat = html.find(">cat<").unwrap();
        assert!(day < cat);
        // ruby markup is shown as text
        assert!(html.contains("&lt;ruby&gt;日&lt;rt&gt;にち&lt;/rt&gt;&lt;/ruby&gt;"));
        assert!(!html.contains("<ruby>"));
    }
}
