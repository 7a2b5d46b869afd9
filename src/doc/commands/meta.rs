/*!
# `LABEL`, `CLEAR`, `PTR <d> <target>`
## Purpose
Works on the script itself.

## Remarks
`label` collects the labels again, starting at the current line. Labels
above it are forgotten until the next run.

`clear` erases every line, releases the arrays and stops.

`ptr` writes the line number of `target` into `d`, which turns a label into
a number other lines can point through.

## Example
```text
ptr @20 .here
.here print @20
2
```
*/
