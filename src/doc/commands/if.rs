/*!
# `IF IFU IFB IFF IFS <a> <op> <b>`, `ELSE`, `ENDIF`
## Purpose
Runs lines only when a comparison holds.

## Remarks
The comparison is made in the domain of the keyword: `if` signed, `ifu`
unsigned, `ifb` decimal, `iff` float and `ifs` text. The operators are
`== != < > <= >=`; a missing operator means `==`. Text only knows `==` and
`!=`.

When the comparison fails, lines are skipped up to the matching `else` or
`endif`. Blocks opened inside the skipped lines are matched, so nesting
works. Reaching `else` after the true branch skips to `endif`.

## Example
```text
if -1 < 1
print 'signed
endif
ifu -1 < 1
print 'unsigned
endif
signed
```
*/
