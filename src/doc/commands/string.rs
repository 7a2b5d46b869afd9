/*!
# `LET MOV <d> <src>`, `APPEND APD <d> <src>`, `HLEN <d> <src>`, `VLEN <d> <start>`
## Purpose
Moves and measures text.

## Remarks
`let` and `mov` copy `src` into `d`. `append` and `apd` add `src` to the end
of `d`; the line width still applies. `hlen` writes the length of `src` in
bytes. `vlen` counts the non-empty lines starting at line `start` and stops
at the first empty one.

## Example
```text
let @20 'abc
apd @20 'def
hlen @21 @20
print @20 \s @21
abcdef 6
```
*/
