/*!
# `WHILE… <a> <op> <b>`, `ENDWHILE`, `FOR <v> <limit>`, `NEXT <v>`, `BREAK`
## Purpose
Repeats lines.

## Remarks
`while`, `whileu`, `whileb`, `whilef` and `whiles` compare like the `if`
family. When the comparison holds, the line is remembered on the link
stack; `endwhile` jumps back to it and it is evaluated again. When it fails,
lines are skipped past the matching `endwhile`.

`for v limit` holds while `v <= limit` as unsigned numbers. `next v` adds
one to `v` and jumps back to the `for`. Leaving the loop through a failed
`for` does not add one.

`break` forgets the innermost loop and skips past its `endwhile` or `next`.

## Example
```text
let @20 1
for @20 3
print @20
next @20
123
```
*/
