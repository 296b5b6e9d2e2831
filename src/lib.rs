#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Tabular CSV

 Converts tabular collections (headers plus row records) into CSV text written
 to any [`std::io::Write`] sink.

 ## Core Concepts

- **TabularView:** an ordered header sequence plus a row source, possibly single-pass.
- **Row:** answers "what is the value under this header?", absent values included.
- **RawRecord:** one input record as a key-value mapping (`HashMap`, `BTreeMap`,
  `Vec<(K, V)>`, `IndexMap`, ...).
- **RecordMapper:** validates a batch of raw records (non-empty, same key set
  everywhere) and turns it into a `TabularView`.
- **CsvConverter:** validates a `TabularView` and streams it to a sink as CSV.
- **StandardCsvConverter:** both steps at once, treating an empty batch as "nothing to write".

 ## Output format

 One header line followed by one line per row, each terminated by `\n`, fields
 separated by `,`. Every whitespace character inside a field becomes a space. A
 field containing `,`, `"` or `'` is wrapped in double quotes and its double
 quotes are doubled. Absent values are written as empty fields.

 ## Features

| **Feature** | **Description**                                           |
|-------------|-----------------------------------------------------------|
| indexmap    | Implements `RawRecord` for `indexmap::IndexMap`           |
| full        | Enables all available features                            |

 ## Getting Started

```rust
use std::collections::BTreeMap;
use tabular_csv::{ConversionError, serialize_records};

fn main() -> Result<(), ConversionError> {
    let records = vec![
        BTreeMap::from([("make", "Porsche"), ("model", "356"), ("description", "Luxury sports car")]),
        BTreeMap::from([("make", "Ford"), ("model", "Mustang"), ("description", "American car, fastback")]),
    ];

    let mut output = Vec::new();
    serialize_records(&records, &mut output)?;

    assert_eq!(
        String::from_utf8_lossy(&output),
        "description,make,model\n\
         Luxury sports car,Porsche,356\n\
         \"American car, fastback\",Ford,Mustang\n"
    );

    Ok(())
}
```

 ## Errors

 Every operation returns a [`ConversionError`]:
 - `InvalidCollection` when the input is malformed, before anything is written
 - `NullArgument` when a required record is absent
 - `SinkWrite` when the sink fails; some lines may already be written

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core traits and validation rules for tabular conversion
pub mod core;

/// Error types for tabular conversion
pub mod error;

#[doc(inline)]
pub use error::*;

/// Record adapters and converters
pub mod item;

#[doc(inline)]
pub use item::mapper::{adapt, adapt_one};

#[doc(inline)]
pub use item::csv::{serialize, serialize_records};
