//! Documentation content for the pathmod CLI

/// Get the query syntax reference
pub fn get_docs_overview() -> &'static str {
    r#"PATHMOD QUERY SYNTAX

A query is a list of segments separated by spaces. Each segment addresses one
level of the document, left to right. The last segment performs the edit.

SEGMENTS

  key               Map key (letters, digits, @ $ _ -)
  key{}             Same, creating an empty object if the key is missing
  key[]             Same, creating an empty array if the key is missing
  field=value       Array element whose `field` equals `value`
  field=value{}     Same, appending {"field": "value"} if no element matches
  @                 Append to an array (last segment only)
  {}                The current object as a whole (last segment only)

EDITS

  On an object      key        set (--value) or delete (--delete) the key
                    {}         replace every key with those of the value
  On an array       @          push the value
                    f=v        insert the value before the match (--value)
                               or remove the match (--delete)

  To change a matched element, keep descending: `items id=b value`.

ERRORS

  InvalidModError           Bad syntax or an edit that cannot apply
  ModTargetNotFoundError    A path segment is missing and has no {} / [] hint
                            (ignored unless --strict is given)

EXAMPLES

  pathmod apply 'nodes{} n2' --value '{"ref":"Object"}' --input '{}'
  pathmod apply 'items id=b' --delete --input '{"items":[{"id":"a"},{"id":"b"}]}'
  pathmod apply '@' --value '"foo"' --input '[]'
  pathmod batch mods.json --pretty < doc.json
  pathmod check 'nodes{} n2 props{} entries[] id=e1{} key'
"#
}
