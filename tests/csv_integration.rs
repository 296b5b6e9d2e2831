mod common;

use std::{
    collections::{BTreeMap, HashMap},
    error::Error,
    fs::{File, read_to_string},
    io::BufWriter,
};

use common::init_logger;
use indexmap::IndexMap;
use tabular_csv::{
    adapt,
    core::{
        converter::{Converter, StandardConverter},
        tabular::{Row, TabularDataBuilder, TabularView},
    },
    item::{
        csv::{CsvConverter, StandardCsvConverter},
        mapper::MapRow,
    },
    serialize, serialize_records,
};
use tempfile::NamedTempFile;

#[derive(Debug)]
struct Product {
    id: &'static str,
    name: &'static str,
    description: Option<&'static str>,
}

impl Row for Product {
    fn get(&self, header: &str) -> Option<&str> {
        match header {
            "id" => Some(self.id),
            "name" => Some(self.name),
            "description" => self.description,
            _ => None,
        }
    }
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: "P001",
            name: "Wireless Headphones",
            description: Some("Noise-cancelling, 20hr battery life"),
        },
        Product {
            id: "P002",
            name: "USB-C Cable",
            description: None,
        },
        Product {
            id: "P003",
            name: "Smart \"Pro\" Watch",
            description: Some("Fitness tracking\nwith heart rate monitor"),
        },
    ]
}

#[test]
fn quoted_field_should_be_written_exactly() -> Result<(), Box<dyn Error>> {
    init_logger();

    let record = HashMap::from([("a", "x,y"), ("b", "z")]);
    let view = TabularDataBuilder::new()
        .headers(["a", "b"])
        .rows(vec![MapRow::new(&record)])
        .build();
    let mut output = Vec::new();

    serialize(view, &mut output)?;

    assert_eq!(String::from_utf8(output)?, "a,b\n\"x,y\",z\n");
    Ok(())
}

#[test]
fn custom_rows_should_be_written_to_file() -> Result<(), Box<dyn Error>> {
    init_logger();

    let file = NamedTempFile::new()?;
    let view = TabularDataBuilder::new()
        .headers(["id", "name", "description"])
        .rows(products())
        .build();

    {
        let mut writer = BufWriter::new(File::create(file.path())?);
        CsvConverter.convert(view, &mut writer)?;
    }

    let csv_content = read_to_string(file.path())?;
    assert_eq!(
        csv_content,
        "id,name,description\n\
         P001,Wireless Headphones,\"Noise-cancelling, 20hr battery life\"\n\
         P002,USB-C Cable,\n\
         P003,\"Smart \"\"Pro\"\" Watch\",Fitness tracking with heart rate monitor\n"
    );
    Ok(())
}

#[test]
fn output_should_be_readable_by_a_csv_parser() -> Result<(), Box<dyn Error>> {
    init_logger();

    let records = vec![
        vec![("city", "Boston"), ("motto", "Sicut patribus, sit Deus nobis")],
        vec![("city", "Concord"), ("motto", "the \"Minute Man\" city")],
        vec![("city", "Coeur d'Alene"), ("motto", "lake\tcity")],
    ];
    let mut output = Vec::new();

    serialize_records(&records, &mut output)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(output.as_slice());

    assert_eq!(
        reader.headers()?.iter().collect::<Vec<_>>(),
        vec!["city", "motto"]
    );

    let parsed = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_owned).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(
        parsed,
        vec![
            vec!["Boston", "Sicut patribus, sit Deus nobis"],
            vec!["Concord", "the \"Minute Man\" city"],
            vec!["Coeur d'Alene", "lake city"],
        ]
    );
    Ok(())
}

#[test]
fn output_should_have_one_line_per_row_plus_header() -> Result<(), Box<dyn Error>> {
    for row_count in [0, 1, 7, 100] {
        let records: Vec<BTreeMap<String, String>> = (0..row_count)
            .map(|i| {
                BTreeMap::from([
                    ("id".to_string(), i.to_string()),
                    ("label".to_string(), format!("item\n{}", i)),
                ])
            })
            .collect();
        let view = TabularDataBuilder::new()
            .headers(["id", "label"])
            .rows(records.iter().map(MapRow::new))
            .build();
        let mut output = Vec::new();

        serialize(view, &mut output)?;

        let text = String::from_utf8(output)?;
        assert_eq!(text.lines().count(), row_count + 1);
        assert_eq!(text.matches('\n').count(), row_count + 1);
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }
    Ok(())
}

#[test]
fn adapted_view_should_keep_index_map_order() -> Result<(), Box<dyn Error>> {
    init_logger();

    let mut first = IndexMap::new();
    first.insert("year", "1948");
    first.insert("make", "Porsche");
    first.insert("description", "Luxury sports car");

    let mut second = IndexMap::new();
    second.insert("description", "City car");
    second.insert("year", "1995");
    second.insert("make", "Peugeot");

    let records = vec![first, second];
    let view = adapt(&records)?;

    assert_eq!(
        view.headers(),
        Some(vec![Some("year"), Some("make"), Some("description")])
    );

    let mut output = Vec::new();
    serialize(view, &mut output)?;

    assert_eq!(
        String::from_utf8(output)?,
        "year,make,description\n1948,Porsche,Luxury sports car\n1995,Peugeot,City car\n"
    );
    Ok(())
}

#[test]
fn standard_converter_should_match_adapt_then_serialize() -> Result<(), Box<dyn Error>> {
    let records = vec![
        vec![("k1", "it's"), ("k2", "plain")],
        vec![("k1", "a,b"), ("k2", "")],
    ];

    let mut composed = Vec::new();
    serialize(adapt(&records)?, &mut composed)?;

    let mut standard = Vec::new();
    let converter: StandardCsvConverter = StandardCsvConverter::default();
    converter.convert(&records, &mut standard)?;

    assert_eq!(composed, standard);
    assert_eq!(
        String::from_utf8(standard)?,
        "k1,k2\n\"it's\",plain\n\"a,b\",\n"
    );
    Ok(())
}

#[test]
fn boxed_rows_of_different_types_should_be_mixed() -> Result<(), Box<dyn Error>> {
    let record = HashMap::from([("id", "P100"), ("name", "Cable")]);
    let rows: Vec<Box<dyn Row + '_>> = vec![
        Box::new(MapRow::new(&record)),
        Box::new(Product {
            id: "P101",
            name: "Charger",
            description: Some("65W"),
        }),
    ];
    let view = TabularDataBuilder::new()
        .headers(["id", "name", "description"])
        .rows(rows)
        .build();
    let mut output = Vec::new();

    serialize(view, &mut output)?;

    assert_eq!(
        String::from_utf8(output)?,
        "id,name,description\nP100,Cable,\nP101,Charger,65W\n"
    );
    Ok(())
}
