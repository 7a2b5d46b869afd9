/*!
# Operators
*/

pub mod ARITHMETIC {
    /*!
    ## `+ - * / %` Add, subtract, multiply, divide, remainder.
    Every domain but text. Integer division truncates toward zero.
    ```text
    int @20 -7 % 3
    print @20
    -1
    ```
    */
}

pub mod BITWISE {
    /*!
    ## `& | ^ << >>` Bitwise and, or, exclusive or, shifts.
    `int` and `uint` only. `>>` on `int` keeps the sign.
    ```text
    int @20 -8 >> 1
    print @20
    -4
    ```
    */
}

pub mod COMPARISON {
    /*!
    ## `== != < > <= >=` Comparisons for the `if` and `while` families.
    Signed comparisons follow the sign, unsigned ones do not.
    Float comparisons with `NaN` never hold for `==`, `>=` or `>`.
    ```text
    ifu 0xFFFFFFFF > 1
    print 'big
    endif
    big
    ```
    */
}

pub mod FUNCTIONS {
    /*!
    ## `sqrt rad sin cos tan ln log abs neg` Float functions.
    `rad` converts degrees to radians and `log` is base ten.
    ```text
    float @20 sqrt 16
    print @20
    4
    ```
    */
}
