/*!
# `AND OR XOR <d> <a> <b>`, `NOT <d> <a>`, `LSL LSR <d> <a> <n>`, `RAND <d>`
## Purpose
Bitwise operations on unsigned 32-bit values.

## Remarks
Results are written as `0b` followed by all 32 binary digits, which is also
a valid input, so results can be fed back in. Shifting by 32 or more gives
zero. `rand` writes 32 random bits; the generator is seeded from
`ALOHA_SEED` when it is set.

## Example
```text
and @20 0b1100 0b1010
print @20
0b00000000000000000000000000001000
```
*/
